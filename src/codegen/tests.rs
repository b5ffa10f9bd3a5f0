//! End-to-end tests for [`generate`].

use pretty_assertions::assert_eq;

use crate::{
    codegen::{CodegenError, EmitOptions, PropertyError, generate},
    error::GenerateError,
    ir::IrError,
    parse::Document,
    tests::assert_matches,
};

fn generate_str(yaml: &str) -> Result<String, GenerateError> {
    let doc = Document::from_yaml(yaml).unwrap();
    let code = generate(&doc, &EmitOptions::default())?;
    Ok(String::from_utf8(code).unwrap())
}

// MARK: Output

#[test]
fn test_single_pod() {
    let code = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.kubernetes.pkg.api.v1.Pod:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: Pod
            properties:
              image:
                type: string
    "})
    .unwrap();

    assert_eq!(
        code,
        indoc::indoc! {"
            {
              core:: {
                v1:: {
                  pod:: {
                    image(image):: {image+: image},
                  },
                },
              },
            }
        "}
    );
}

#[test]
fn test_full_library() {
    let code = generate_str(indoc::indoc! {r##"
        definitions:
          io.k8s.api.core.v1.Container:
            properties:
              image:
                type: string
          io.k8s.api.apps.v1beta1.Deployment:
            x-kubernetes-group-version-kind:
              - group: apps
                version: v1beta1
                kind: Deployment
            properties:
              apiVersion:
                type: string
              kind:
                type: string
              metadata:
                $ref: '#/definitions/io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta'
              spec:
                $ref: '#/definitions/io.k8s.api.apps.v1beta1.DeploymentSpec'
              replicas:
                type: integer
          io.k8s.api.core.v1.Pod:
            x-kubernetes-group-version-kind:
              - group: ''
                version: v1
                kind: Pod
            properties:
              containers:
                type: array
                items:
                  $ref: '#/definitions/io.k8s.api.core.v1.Container'
              hostNetwork:
                type: boolean
              nodeSelector:
                type: object
          io.k8s.api.core.v1.ConfigMap:
            x-kubernetes-group-version-kind:
              - group: ''
                version: v1
                kind: ConfigMap
            properties:
              data:
                type: object
          io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta:
            properties:
              name:
                type: string
          io.k8s.apimachinery.pkg.util.intstr.IntOrString:
            type: string
    "##})
    .unwrap();

    assert_eq!(
        code,
        indoc::indoc! {r#"
            {
              apps:: {
                v1beta1:: {
                  deployment:: {
                    replicas(replicas):: {replicas+: replicas},
                  },
                },
              },
              core:: {
                v1:: {
                  configMap:: {
                    data(data):: {data+: data},
                  },
                  pod:: {
                    containers(containers):: if std.type(containers) == "array" then {containers+: containers} else {containers: [containers]},
                    hostNetwork(hostNetwork):: {hostNetwork+: hostNetwork},
                    nodeSelector(nodeSelector):: {nodeSelector+: nodeSelector},
                  },
                },
              },
              meta:: {
                v1:: {
                },
              },
            }
        "#}
    );
}

#[test]
fn test_empty_document() {
    let code = generate_str("definitions: {}").unwrap();

    assert_eq!(code, "{\n}\n");
}

#[test]
fn test_custom_indent() {
    let doc = Document::from_yaml(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.Pod:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: Pod
            properties:
              image:
                type: string
    "})
    .unwrap();
    let options = EmitOptions {
        indent: 4,
        ..Default::default()
    };

    let code = String::from_utf8(generate(&doc, &options).unwrap()).unwrap();

    assert_eq!(
        code,
        indoc::indoc! {"
            {
                core:: {
                    v1:: {
                        pod:: {
                            image(image):: {image+: image},
                        },
                    },
                },
            }
        "}
    );
}

// MARK: Determinism

#[test]
fn test_input_order_does_not_change_output() {
    let forward = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.batch.v1.Job:
            x-kubernetes-group-version-kind:
              - group: batch
                version: v1
                kind: Job
            properties:
              parallelism:
                type: integer
              completions:
                type: integer
          io.k8s.api.apps.v1.ReplicaSet:
            x-kubernetes-group-version-kind:
              - group: apps
                version: v1
                kind: ReplicaSet
            properties:
              selector:
                type: object
              minReadySeconds:
                type: integer
          io.k8s.api.apps.v1beta2.ReplicaSet:
            x-kubernetes-group-version-kind:
              - group: apps
                version: v1beta2
                kind: ReplicaSet
            properties:
              selector:
                type: object
    "})
    .unwrap();
    let reversed = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.apps.v1beta2.ReplicaSet:
            x-kubernetes-group-version-kind:
              - group: apps
                version: v1beta2
                kind: ReplicaSet
            properties:
              selector:
                type: object
          io.k8s.api.apps.v1.ReplicaSet:
            x-kubernetes-group-version-kind:
              - group: apps
                version: v1
                kind: ReplicaSet
            properties:
              minReadySeconds:
                type: integer
              selector:
                type: object
          io.k8s.api.batch.v1.Job:
            x-kubernetes-group-version-kind:
              - group: batch
                version: v1
                kind: Job
            properties:
              completions:
                type: integer
              parallelism:
                type: integer
    "})
    .unwrap();

    assert_eq!(forward, reversed);
}

#[test]
fn test_repeated_runs_are_identical() {
    let doc = Document::from_yaml(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.Service:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: Service
            properties:
              ports:
                type: array
              clusterIP:
                type: string
              type:
                type: string
    "})
    .unwrap();
    let options = EmitOptions::default();

    let first = generate(&doc, &options).unwrap();
    let second = generate(&doc, &options).unwrap();

    assert_eq!(first, second);
}

// MARK: Filtering

#[test]
fn test_reference_properties_emit_no_lines() {
    let code = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.PodTemplate:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: PodTemplate
            properties:
              template:
                $ref: '#/definitions/io.k8s.api.core.v1.PodTemplateSpec'
              status:
                $ref: '#/definitions/io.k8s.api.core.v1.PodStatus'
              revision:
                type: integer
              labels:
                type: object
              kind:
                type: string
    "})
    .unwrap();

    // 5 properties, minus 2 references, minus 1 special property.
    let methods = code.lines().filter(|line| line.contains("):: ")).count();
    assert_eq!(methods, 2);
    assert!(!code.contains("template("));
    assert!(!code.contains("status("));
    assert!(!code.contains("kind("));
}

#[test]
fn test_objects_without_top_level_specs_are_not_emitted() {
    let code = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.Container:
            properties:
              image:
                type: string
          io.k8s.api.core.v1.Pod:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: Pod
            properties:
              hostname:
                type: string
    "})
    .unwrap();

    assert!(code.contains("pod:: {"));
    assert!(!code.contains("container:: {"));
    assert!(!code.contains("image("));
}

#[test]
fn test_skips_unversioned_definitions() {
    let code = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.apimachinery.pkg.api.resource.Quantity:
            properties:
              bogus: {}
          io.k8s.api.core.v1.Pod:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: Pod
            properties:
              hostname:
                type: string
    "})
    .unwrap();

    assert!(code.contains("hostname(hostname)::"));
    assert!(!code.contains("quantity"));
}

// MARK: Errors

#[test]
fn test_duplicate_kind_aborts() {
    let result = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.Pod:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: Pod
          io.k8s.kubernetes.pkg.api.v1.Pod:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: Pod
    "});

    assert_matches!(result, Err(GenerateError::Ir(IrError::DuplicateKind(_))));
}

#[test]
fn test_case_collision_aborts() {
    let result = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.Binding:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: Binding
          io.k8s.api.core.v1.binding:
            properties:
              target:
                type: string
    "});

    assert_matches!(
        result,
        Err(GenerateError::Codegen(CodegenError::Collision { kind, ident, version }))
            if kind == "Binding" && ident == "binding" && version == "v1",
    );
}

#[test]
fn test_lowercase_kind_does_not_collide_with_itself() {
    let code = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.pod:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: pod
            properties:
              image:
                type: string
    "})
    .unwrap();

    assert!(code.contains("pod:: {"));
}

#[test]
fn test_untyped_property_aborts() {
    let result = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.ConfigMap:
            x-kubernetes-group-version-kind:
              - version: v1
                kind: ConfigMap
            properties:
              data:
                description: Neither a type nor a reference.
    "});

    assert_matches!(
        result,
        Err(GenerateError::Codegen(CodegenError::Property {
            object,
            source: PropertyError::Untyped(property),
        })) if object == "ConfigMap" && property == "data",
    );
}

#[test]
fn test_untyped_property_on_suppressed_object_is_ignored() {
    let result = generate_str(indoc::indoc! {"
        definitions:
          io.k8s.api.core.v1.ConfigMapKeySelector:
            properties:
              key: {}
    "});

    assert_matches!(result, Ok(_));
}
